mod helpers;

mod health;
mod login;
mod password_reset;
mod register;
mod send_verification;
