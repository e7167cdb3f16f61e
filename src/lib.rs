pub mod shared {
    pub mod infrastructure {
        pub mod keyed_locks;
        pub mod store_error;
    }
}

pub mod modules {
    pub mod shopping {
        pub mod core {
            pub mod cart_line_item;
            pub mod cart_pager;
            pub mod cart_reconciler;
            pub mod cart_selection;
            pub mod paginated_loader;
            pub mod product;
            pub mod quantity_dialog;
            pub mod recency_tracker;
            pub mod recently_viewed;
            pub mod shopping_product;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod add_to_cart {
                pub mod command;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod change_quantity {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod edit_cart {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod load_catalog {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod open_product {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod refresh_cart_count {
                pub mod handler;
            }
            pub mod show_recent_products {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod cart_store;
                pub mod cart_store_in_memory;
                pub mod catalog_store;
                pub mod catalog_store_in_memory;
                pub mod recency_store;
                pub mod recency_store_in_memory;
                pub mod view;
                pub mod view_recording;
            }
        }
        pub mod orchestrator;
    }
}

pub mod shell;
