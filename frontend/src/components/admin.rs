//! 管理端页面
//!
//! 全部位于管理员守卫之后（路由层 `requires_admin`），
//! 统一由 `AdminShell` 提供侧栏布局，不渲染商城导航/页脚。

mod categories;
mod dashboard;
mod layout;
mod orders;
mod products;
mod users;

pub use categories::AdminCategoriesPage;
pub use dashboard::AdminDashboardPage;
pub use orders::AdminOrdersPage;
pub use products::AdminProductsPage;
pub use users::AdminUsersPage;
