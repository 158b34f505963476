pub mod use_price_feed;
