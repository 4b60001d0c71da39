pub mod application {
    pub mod catalog {
        pub mod store;
    }
    pub mod product {
        pub mod fetch_all;
        pub mod fetch_by_id;
    }
}

pub mod domain {
    pub mod errors;
    pub mod http;
    pub mod logger;
    pub mod notifier;
    pub mod catalog {
        pub mod state;
    }
    pub mod product {
        pub mod filters;
        pub mod model;
        pub mod normalize;
        pub mod value_objects;
        pub mod use_cases {
            pub mod fetch_all;
            pub mod fetch_by_id;
        }
    }
}
