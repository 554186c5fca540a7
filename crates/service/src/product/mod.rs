pub mod repository;
pub mod service;

pub use models::product::{Model as Product, ProductDraft};
pub use repository::{memory::InMemoryProductRepository, ProductRepository, SeaOrmProductRepository};
pub use service::ProductService;
