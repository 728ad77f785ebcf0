pub mod application {
    pub mod product {
        pub mod authorize;
        pub mod buy;
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod service;
        pub mod update;
        #[cfg(test)]
        pub(crate) mod test_support;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod principal;
        pub mod value_objects;
    }
    pub mod product {
        pub mod authorization;
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod service;
        pub mod value_objects;
        pub mod use_cases {
            pub mod authorize;
            pub mod buy;
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
}
