use fast_chemail::is_valid_email;
use ecocity_core::gateways::email::EmailGateway;
use ecocity_entities::email::*;
#[cfg(not(test))]
use std::{
    io::prelude::*,
    process::{Command, Stdio},
};
use std::{
    io::{Error, ErrorKind, Result},
    thread,
};
use time::{format_description::well_known::Rfc2822, OffsetDateTime};

/// Hands composed messages over to the local `sendmail` binary.
#[derive(Debug, Clone)]
pub struct Sendmail {
    from: EmailAddress,
}

impl Sendmail {
    pub fn new(from: EmailAddress) -> Self {
        Self { from }
    }

    fn send(&self, mail: String) {
        thread::spawn(move || {
            if let Err(err) = send_raw(&mail) {
                warn!("Could not send e-mail: {}", err);
            }
        });
    }
}

#[cfg(not(test))]
fn send_raw(mail: &str) -> Result<()> {
    let mut child = Command::new("sendmail")
        .arg("-t")
        .stdin(Stdio::piped())
        .spawn()?;
    child
        .stdin
        .as_mut()
        .ok_or_else(|| Error::new(ErrorKind::Other, "Could not get stdin"))?
        .write_all(mail.as_bytes())?;
    child.wait_with_output()?;
    Ok(())
}

/// Don't actually send emails while running the tests.
#[cfg(test)]
fn send_raw(mail: &str) -> Result<()> {
    debug!("Would send e-mail: {}", mail);
    Ok(())
}

impl EmailGateway for Sendmail {
    fn compose_and_send(&self, recipients: &[EmailAddress], email: &EmailContent) {
        debug!("Sending e-mails to: {:?}", recipients);
        for to in recipients {
            match compose(self.from.as_str(), &[to.as_str()], &email.subject, &email.body) {
                Ok(mail) => {
                    self.send(mail);
                }
                Err(err) => {
                    warn!("Failed to compose e-mail: {}", err);
                }
            }
        }
    }
}

// quoted_printable limits the length of lines to 76 chars
// and otherwise inserts unintended line breaks! The max.
// length of a header line is 78 chars including the \r\n
// line break.
const MAX_HEADER_FIELD_LEN: usize = 76;

const LINE_BREAK: &str = "\r\n";

fn encode_header_field(name: &str, input: &str) -> String {
    // overhead of one encoded word (see string formatting literal below)
    const ENCODING_OVERHEAD: usize = "=?UTF-8?Q??=".len();
    let mut output = String::with_capacity(name.len() + 1 + input.len() * 2);
    output.push_str(name);
    output.push(':');
    let mut prefix_len = name.len() + 1;
    let mut word = String::new();
    let mut first = true;
    for c in input.chars() {
        let mut buf = [0u8; 4];
        let encoded_char = quoted_printable::encode_to_str(c.encode_utf8(&mut buf).as_bytes());
        if ENCODING_OVERHEAD + word.len() + encoded_char.len() > MAX_HEADER_FIELD_LEN - prefix_len
        {
            if !first {
                output.push_str(LINE_BREAK);
                output.push(' ');
            }
            output.push_str(&format!("=?UTF-8?Q?{}?=", word));
            word.clear();
            first = false;
            prefix_len = 1;
        }
        word.push_str(&encoded_char);
    }
    if !word.is_empty() || first {
        if !first {
            output.push_str(LINE_BREAK);
            output.push(' ');
        }
        output.push_str(&format!("=?UTF-8?Q?{}?=", word));
    }
    output
}

pub fn compose(from: &str, to: &[&str], subject: &str, body: &str) -> Result<String> {
    let to: Vec<_> = to.iter().filter(|m| is_valid_email(m)).cloned().collect();

    if to.is_empty() {
        return Err(Error::new(
            ErrorKind::Other,
            "No valid email addresses specified",
        ));
    }

    let date = OffsetDateTime::now_utc()
        .format(&Rfc2822)
        .map_err(|err| Error::new(ErrorKind::Other, err))?;

    let mail = format!(
        "Date:{date}\r\n\
         From:{from}\r\n\
         To:{to}\r\n\
         {subject_header}\r\n\
         MIME-Version:1.0\r\n\
         Content-Type:text/plain;charset=utf-8\r\n\r\n\
         {body}",
        date = date,
        from = from,
        to = to.join(","),
        subject_header = encode_header_field("Subject", subject),
        body = body
    );

    debug!("composed email: {}", &mail);

    Ok(mail)
}
