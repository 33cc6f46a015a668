pub mod course;
pub mod user;

/*
 A user signs up with an email address and a password; the password is stored
 as an Argon2 hash, never in the clear.
 Courses always belong to exactly one user. Anyone can browse the catalog,
 but only the owner of a course may change or delete it.
 */
