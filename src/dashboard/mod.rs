pub mod html;
pub mod routes;
pub mod table;

pub use self::routes::init;
