///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (id) {
        id -> BigInt,
        uid -> Text,
        email -> Text,
        email_confirmed -> Bool,
        password -> Text,
        role -> SmallInt,
        name -> Text,
        bio -> Text,
        photo_url -> Nullable<Text>,
        created_at -> BigInt,
    }
}

table! {
    user_tokens (id) {
        id -> BigInt,
        user_id -> BigInt,
        expires_at -> BigInt,
        nonce -> Text,
    }
}

joinable!(user_tokens -> users (user_id));

///////////////////////////////////////////////////////////////////////
// Published map content
///////////////////////////////////////////////////////////////////////

table! {
    points (id) {
        id -> BigInt,
        uid -> Text,
        name -> Text,
        category -> SmallInt,
        lat -> Double,
        lng -> Double,
        description -> Text,
        impact -> Text,
        address -> Text,
        opening_hours -> Nullable<Text>,
        contact -> Nullable<Text>,
        website -> Nullable<Text>,
        created_by -> Nullable<Text>,
        created_at -> BigInt,
    }
}

table! {
    events (id) {
        id -> BigInt,
        uid -> Text,
        title -> Text,
        description -> Text,
        date -> Text,
        time -> Nullable<Text>,
        address -> Text,
        organizer -> Text,
        lat -> Double,
        lng -> Double,
        created_by -> Nullable<Text>,
        created_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Requests
///////////////////////////////////////////////////////////////////////

table! {
    point_requests (id) {
        id -> BigInt,
        uid -> Text,
        name -> Text,
        category -> SmallInt,
        address -> Text,
        description -> Text,
        impact -> Text,
        status -> SmallInt,
        created_by -> Text,
        created_at -> BigInt,
        decided_at -> Nullable<BigInt>,
        point_uid -> Nullable<Text>,
    }
}

table! {
    event_requests (id) {
        id -> BigInt,
        uid -> Text,
        title -> Text,
        description -> Text,
        date -> Text,
        time -> Nullable<Text>,
        address -> Text,
        organizer -> Text,
        status -> SmallInt,
        created_by -> Text,
        created_at -> BigInt,
        decided_at -> Nullable<BigInt>,
        event_uid -> Nullable<Text>,
    }
}

///////////////////////////////////////////////////////////////////////

allow_tables_to_appear_in_same_query!(
    events,
    event_requests,
    points,
    point_requests,
    users,
    user_tokens,
);
