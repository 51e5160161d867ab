//! Diesel schema for board persistence.

diesel::table! {
    /// Registered users.
    users (id) {
        /// Generated user identifier.
        id -> Int8,
        /// Display name.
        #[max_length = 255]
        name -> Varchar,
        /// Unique email address.
        #[max_length = 255]
        email -> Varchar,
    }
}

diesel::table! {
    /// Projects owned by users.
    projects (id) {
        /// Generated project identifier.
        id -> Int8,
        /// Owning user.
        user_id -> Int8,
        /// Project name, unique per owner.
        #[max_length = 255]
        name -> Varchar,
        /// Optional description.
        description -> Nullable<Text>,
        /// Insertion timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Tasks owned by users and optionally filed under a project.
    tasks (id) {
        /// Generated task identifier.
        id -> Int8,
        /// Owning user.
        user_id -> Int8,
        /// Optional project reference.
        project_id -> Nullable<Int8>,
        /// Task name.
        #[max_length = 255]
        name -> Varchar,
        /// Optional description.
        description -> Nullable<Text>,
        /// Task status.
        #[max_length = 20]
        status -> Varchar,
        /// Insertion timestamp.
        created_at -> Timestamptz,
    }
}

diesel::joinable!(projects -> users (user_id));
diesel::joinable!(tasks -> users (user_id));
diesel::joinable!(tasks -> projects (project_id));

diesel::allow_tables_to_appear_in_same_query!(users, projects, tasks);
