pub mod cocktaildb;

pub use cocktaildb::CocktailDbProvider;
