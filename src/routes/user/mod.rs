pub mod create;
pub mod signin;
pub mod signout;
