mod episode;
mod home;
mod not_found;
mod status;

pub use episode::*;
pub use home::*;
pub use not_found::*;
pub use status::*;
