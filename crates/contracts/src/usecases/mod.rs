pub mod common;
pub mod u601_load_catalog;
pub mod u602_render_page;
