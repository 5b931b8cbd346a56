mod short_link;

pub use short_link::{
    create_handler, index_handler, method_not_allowed_handler, not_found_handler,
    redirect_handler,
};
