mod application {
    mod test_client;
    mod test_config;
}
mod model {
    mod test_http;
    mod test_requests;
    mod test_responses;
}
mod presentation {
    mod test_records;
}
mod utils {
    mod test_config;
    mod test_path;
}
