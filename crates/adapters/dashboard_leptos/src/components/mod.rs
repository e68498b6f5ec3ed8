mod side_nav;
mod top_nav;

pub use side_nav::SideNav;
pub use top_nav::TopNav;
