// Landing page sections, top to bottom

mod about;
mod contact;
mod courses;
mod footer;
mod hero;
mod nav;
mod testimonials;

pub use about::About;
pub use contact::Contact;
pub use courses::Courses;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use testimonials::Testimonials;
