use rocket::Route;

pub mod change_password;
pub mod create_account;
pub mod login;
pub mod logout;
pub mod password_reset;
pub mod resend_verification;
pub mod send_password_reset;
pub mod verify_email;

pub fn routes() -> Vec<Route> {
    routes![
        create_account::create_account,
        verify_email::verify_email,
        resend_verification::resend_verification,
        login::login,
        logout::logout,
        send_password_reset::send_password_reset,
        password_reset::password_reset,
        change_password::change_password,
    ]
}
