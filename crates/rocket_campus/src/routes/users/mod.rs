use rocket::Route;

pub mod bookmark;
pub mod close_account;
pub mod create;
pub mod dashboard;
pub mod delete;
pub mod edit;
pub mod fetch_me;
pub mod list;
pub mod set_image;
pub mod subscribe;
pub mod unbookmark;
pub mod unsubscribe;
pub mod watch;

pub fn routes() -> Vec<Route> {
    routes![
        list::list,
        create::create,
        fetch_me::fetch_me,
        dashboard::dashboard,
        edit::edit,
        delete::delete,
        close_account::close_account,
        subscribe::subscribe,
        unsubscribe::unsubscribe,
        bookmark::bookmark,
        unbookmark::unbookmark,
        watch::watch,
        set_image::set_image,
        set_image::clear_image,
    ]
}
