pub mod request;
pub mod response;

pub use request::{SocialLink, SocialPlatform, StoreProfile};
pub use response::RenderResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct RenderPage;

impl UseCaseMetadata for RenderPage {
    fn usecase_index() -> &'static str {
        "u602"
    }

    fn usecase_name() -> &'static str {
        "render_page"
    }

    fn display_name() -> &'static str {
        "Генерация страницы каталога"
    }

    fn description() -> &'static str {
        "Сборка единого HTML-документа с карточками товаров и корзиной"
    }
}
