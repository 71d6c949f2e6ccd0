use rocket::Route;

pub mod activate;
pub mod append_addon;
pub mod append_video;
pub mod create;
pub mod delete;
pub mod edit;
pub mod fetch;
pub mod fetch_addons;
pub mod fetch_rating;
pub mod fetch_videos;
pub mod list;
pub mod remove_addon;
pub mod remove_rating;
pub mod remove_video;
pub mod submit_rating;

pub fn routes() -> Vec<Route> {
    routes![
        list::list,
        fetch::fetch,
        create::create,
        edit::edit,
        delete::delete,
        activate::activate,
        fetch_rating::fetch_rating,
        submit_rating::submit_rating,
        remove_rating::remove_rating,
        fetch_videos::fetch_videos,
        append_video::append_video,
        remove_video::remove_video,
        fetch_addons::fetch_addons,
        append_addon::append_addon,
        remove_addon::remove_addon,
    ]
}
