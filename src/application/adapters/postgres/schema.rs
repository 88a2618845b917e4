//! Diesel schema for application records.

diesel::table! {
    /// Applications owning tasks and their running-number counters.
    applications (acronym) {
        /// Unique application acronym.
        #[max_length = 50]
        acronym -> Varchar,
        /// Running number of the most recently created task.
        running_number -> Int8,
        /// Group permitted to create tasks.
        #[max_length = 100]
        permit_create -> Nullable<Varchar>,
        /// Group permitted to work tasks in `Doing`.
        #[max_length = 100]
        permit_doing -> Nullable<Varchar>,
        /// Group permitted to promote tasks to `Done`.
        #[max_length = 100]
        permit_done -> Nullable<Varchar>,
    }
}
