//! Diesel schema for user records.

diesel::table! {
    /// User accounts provisioned outside the task-tracking core.
    users (username) {
        /// Unique account name.
        #[max_length = 100]
        username -> Varchar,
        /// Encoded password hash.
        #[max_length = 255]
        password -> Varchar,
        /// Optional notification address.
        #[max_length = 255]
        email -> Nullable<Varchar>,
        /// Disabled accounts are rejected for every action.
        is_disabled -> Bool,
        /// Comma-delimited permission group names.
        group_list -> Text,
    }
}
