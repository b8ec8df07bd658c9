use httpmock::prelude::*;
use proptest::prelude::*;
use serde_json::json;

use lookup::client::{HttpBackend, SearchBackend};

use super::common::mock_search;

#[test]
fn any_query_is_posted_verbatim_as_plain_text() {
    let server = MockServer::start();
    let backend = HttpBackend::new(&server.base_url(), None).unwrap();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();

    proptest!(ProptestConfig::with_cases(32), |(query in "\\PC{0,48}")| {
        let mut mock = mock_search(&server, &query, json!([[query.clone(), 1.0]]));

        let results = runtime.block_on(backend.search(&query)).unwrap();

        mock.assert();
        prop_assert_eq!(results.len(), 1);
        prop_assert_eq!(&results[0].path, &query);
        mock.delete();
    });
}
