pub use fast_chemail::is_valid_email;

pub fn is_non_blank(s: &str) -> bool {
    !s.trim().is_empty()
}
