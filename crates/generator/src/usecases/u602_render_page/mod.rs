pub mod assets;
pub mod cart;
pub mod document;
pub mod escape;
pub mod executor;
pub mod page;

pub use cart::{parse_price, Cart, CartAction, CartItem};
pub use executor::RenderExecutor;
pub use page::render_page;
