pub mod cart_mapper;

pub use cart_mapper::CartMapper;
