use rocket::Route;

pub mod create;
pub mod delete;
pub mod edit;
pub mod fetch;
pub mod list;

pub fn routes() -> Vec<Route> {
    routes![
        list::list,
        fetch::fetch,
        create::create,
        edit::edit,
        delete::delete,
    ]
}
