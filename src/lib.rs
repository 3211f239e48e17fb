pub mod application {
    pub mod error;
    pub mod service;
}

pub mod domain {
    pub mod error;
    pub mod model {
        pub mod book;
        pub mod library;
        pub mod statistics;
    }
    pub mod repository;
}

pub mod infra {
    pub mod json_store;
}

pub mod interface {
    pub mod mcp;
    pub mod text;
}
