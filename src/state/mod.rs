pub mod crawl_state;
