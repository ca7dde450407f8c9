// Maintained by hand; keep in sync with migrations/. The INTEGER rowid
// holds 64-bit values, so `id` maps to BigInt rather than the Integer
// that `diesel print-schema` would emit.

diesel::table! {
    cards (id) {
        id -> BigInt,
        title -> Text,
        description -> Nullable<Text>,
        status -> Text,
        created_at -> Timestamp,
    }
}
