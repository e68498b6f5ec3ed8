mod app;
mod dashboard;

pub use app::AppPage;
pub use dashboard::Dashboard;
