pub mod shared {
    pub mod core {
        pub mod record;
    }
    pub mod infrastructure {
        pub mod http;
        pub mod record_file;
    }
}

pub mod modules {
    pub mod events {
        pub mod core {
            pub mod event;
            pub mod filter;
            pub mod patch;
        }
        pub mod application {
            pub mod errors;
            pub mod event_store;
        }
        pub mod use_cases {
            pub mod list_events {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_event {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_event {
                pub mod command;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_event {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_event {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod search_events {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
    pub mod registrations {
        pub mod core {
            pub mod registration;
        }
        pub mod application {
            pub mod errors;
            pub mod registration_store;
        }
        pub mod use_cases {
            pub mod register_for_event {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_registrations {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
