//! Diesel schema for task persistence.

diesel::table! {
    /// Task records owned by applications.
    tasks (id) {
        /// Application acronym followed by its running number.
        #[max_length = 100]
        id -> Varchar,
        /// Task name.
        #[max_length = 255]
        name -> Varchar,
        /// Optional free-text description.
        description -> Nullable<Text>,
        /// Audit log, newest entry first, entries separated by a blank line.
        notes -> Text,
        /// Owning application.
        #[max_length = 50]
        app_acronym -> Varchar,
        /// Lifecycle state, constrained to the five known names.
        #[max_length = 10]
        state -> Varchar,
        /// Creating user.
        #[max_length = 100]
        creator -> Varchar,
        /// Current owner.
        #[max_length = 100]
        owner -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
