pub mod http_remote;
