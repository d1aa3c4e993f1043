pub mod astronaut;
pub mod image;
pub mod planet;

pub mod prelude {
    pub use super::astronaut::Entity as Astronaut;
    pub use super::image::Entity as Image;
    pub use super::planet::Entity as Planet;
}
