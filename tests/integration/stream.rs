//! Stream endpoint integration tests, driven by a wiremock server.

use crate::common::{
    assert_no_requests, setup, test_video, SINGLE_STREAM_RESPONSE, TEST_ACCOUNT_ID, TEST_VIDEO_ID,
};
use cfapi::prelude::*;
use std::io::Write;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn json_response(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "application/json")
}

#[tokio::test]
async fn upload_from_url() {
    let (mock_server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(format!("/accounts/{TEST_ACCOUNT_ID}/stream/copy")))
        .and(body_json(serde_json::json!({
            "url": "https://example.com/myvideo.mp4",
            "meta": {"name": "My First Stream Video"}
        })))
        .respond_with(json_response(SINGLE_STREAM_RESPONSE))
        .expect(1)
        .mount(&mock_server)
        .await;

    let params = StreamUploadFromUrlParameters {
        account_id: TEST_ACCOUNT_ID.to_string(),
        url: "https://example.com/myvideo.mp4".to_string(),
        meta: Some(
            std::iter::once((
                "name".to_string(),
                serde_json::json!("My First Stream Video"),
            ))
            .collect(),
        ),
        ..Default::default()
    };

    let video = client.stream_upload_from_url(&params).await.unwrap();
    assert_eq!(video, test_video());
}

#[tokio::test]
async fn upload_from_url_validation() {
    let (mock_server, client) = setup().await;

    let err = client
        .stream_upload_from_url(&StreamUploadFromUrlParameters::default())
        .await
        .unwrap_err();
    assert_eq!(err.as_request(), Some(RequestError::MissingAccountId));

    let err = client
        .stream_upload_from_url(&StreamUploadFromUrlParameters {
            account_id: TEST_ACCOUNT_ID.to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_eq!(err.as_request(), Some(RequestError::MissingUploadUrl));

    assert_no_requests(&mock_server).await;
}

#[tokio::test]
async fn upload_video_file() {
    let (mock_server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(format!("/accounts/{TEST_ACCOUNT_ID}/stream")))
        .respond_with(json_response(SINGLE_STREAM_RESPONSE))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"not really an mp4").unwrap();

    let params = StreamUploadFileParameters {
        account_id: TEST_ACCOUNT_ID.to_string(),
        video_id: TEST_VIDEO_ID.to_string(),
        file_path: file.path().to_path_buf(),
    };

    let video = client.stream_upload_video_file(&params).await.unwrap();
    assert_eq!(video, test_video());
}

#[tokio::test]
async fn upload_video_file_validation() {
    let (mock_server, client) = setup().await;

    let err = client
        .stream_upload_video_file(&StreamUploadFileParameters::default())
        .await
        .unwrap_err();
    assert_eq!(err.as_request(), Some(RequestError::MissingAccountId));

    let err = client
        .stream_upload_video_file(&StreamUploadFileParameters {
            account_id: TEST_ACCOUNT_ID.to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_eq!(err.as_request(), Some(RequestError::MissingFilePath));

    assert_no_requests(&mock_server).await;
}

#[tokio::test]
async fn upload_video_file_unreadable_path_is_file_error() {
    let (mock_server, client) = setup().await;

    let err = client
        .stream_upload_video_file(&StreamUploadFileParameters {
            account_id: TEST_ACCOUNT_ID.to_string(),
            video_id: TEST_VIDEO_ID.to_string(),
            file_path: "/definitely/not/here.mp4".into(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, Error::File { .. }), "got {err:?}");
    assert_no_requests(&mock_server).await;
}

#[tokio::test]
async fn create_video_direct_url() {
    let (mock_server, client) = setup().await;

    let response = r#"
{
  "success": true,
  "errors": [],
  "messages": [],
  "result": {
    "uploadURL": "www.example.com/samplepath",
    "uid": "ea95132c15732412d22c1476fa83f27a",
    "watermark": {
      "uid": "ea95132c15732412d22c1476fa83f27a",
      "size": 29472,
      "height": 600,
      "width": 400,
      "created": "2014-01-02T02:20:00Z",
      "downloadedFrom": "https://company.com/logo.png",
      "name": "Marketing Videos",
      "opacity": 0.75,
      "padding": 0.1,
      "scale": 0.1,
      "position": "center"
    }
  }
}
"#;
    Mock::given(method("POST"))
        .and(path(format!(
            "/accounts/{TEST_ACCOUNT_ID}/stream/direct_upload"
        )))
        .and(body_json(serde_json::json!({
            "maxDurationSeconds": 300,
            "meta": {"name": "My First Stream Video"}
        })))
        .respond_with(json_response(response))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = client
        .stream_create_video_direct_url(&StreamCreateVideoParameters::default())
        .await
        .unwrap_err();
    assert_eq!(err.as_request(), Some(RequestError::MissingAccountId));

    let err = client
        .stream_create_video_direct_url(&StreamCreateVideoParameters {
            account_id: TEST_ACCOUNT_ID.to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_eq!(err.as_request(), Some(RequestError::MissingMaxDuration));

    let created = client
        .stream_create_video_direct_url(&StreamCreateVideoParameters {
            account_id: TEST_ACCOUNT_ID.to_string(),
            max_duration_seconds: 300,
            meta: Some(
                std::iter::once((
                    "name".to_string(),
                    serde_json::json!("My First Stream Video"),
                ))
                .collect(),
            ),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(created.upload_url, "www.example.com/samplepath");
    assert_eq!(created.uid, TEST_VIDEO_ID);
    assert_eq!(created.watermark, test_video().watermark);
}

#[tokio::test]
async fn list_videos() {
    let (mock_server, client) = setup().await;

    let parsed: serde_json::Value = serde_json::from_str(SINGLE_STREAM_RESPONSE).unwrap();
    let list_body = serde_json::json!({
        "success": true,
        "errors": [],
        "messages": [],
        "result": [parsed["result"]]
    })
    .to_string();

    Mock::given(method("GET"))
        .and(path(format!("/accounts/{TEST_ACCOUNT_ID}/stream")))
        .respond_with(json_response(&list_body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = client
        .stream_list_videos(&StreamListParameters::default())
        .await
        .unwrap_err();
    assert_eq!(err.as_request(), Some(RequestError::MissingAccountId));

    let videos = client
        .stream_list_videos(&StreamListParameters {
            account_id: TEST_ACCOUNT_ID.to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(videos.len(), 1, "length of videos is not one");
    assert_eq!(videos[0], test_video());
}

#[tokio::test]
async fn list_videos_sends_filters_as_query_params() {
    let (mock_server, client) = setup().await;

    let empty_list = r#"{"success":true,"errors":[],"messages":[],"result":[]}"#;
    Mock::given(method("GET"))
        .and(path(format!("/accounts/{TEST_ACCOUNT_ID}/stream")))
        .and(query_param("search", "puppy videos"))
        .and(query_param("limit", "25"))
        .and(query_param("asc", "true"))
        .respond_with(json_response(empty_list))
        .expect(1)
        .mount(&mock_server)
        .await;

    let videos = client
        .stream_list_videos(&StreamListParameters {
            account_id: TEST_ACCOUNT_ID.to_string(),
            search: Some("puppy videos".to_string()),
            limit: Some(25),
            asc: Some(true),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(videos.is_empty());
}

#[tokio::test]
async fn get_video() {
    let (mock_server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(format!(
            "/accounts/{TEST_ACCOUNT_ID}/stream/{TEST_VIDEO_ID}"
        )))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(json_response(SINGLE_STREAM_RESPONSE))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = client
        .stream_get_video(&StreamParameters::default())
        .await
        .unwrap_err();
    assert_eq!(err.as_request(), Some(RequestError::MissingAccountId));

    let err = client
        .stream_get_video(&StreamParameters {
            account_id: TEST_ACCOUNT_ID.to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_eq!(err.as_request(), Some(RequestError::MissingVideoId));

    let video = client
        .stream_get_video(&StreamParameters {
            account_id: TEST_ACCOUNT_ID.to_string(),
            video_id: TEST_VIDEO_ID.to_string(),
        })
        .await
        .unwrap();

    assert_eq!(video.uid, TEST_VIDEO_ID);
    assert_eq!(video.status.state, "inprogress");
    assert_eq!(video.watermark.as_ref().unwrap().position, "center");
    assert_eq!(video, test_video());
}

#[tokio::test]
async fn delete_video() {
    let (mock_server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path(format!(
            "/accounts/{TEST_ACCOUNT_ID}/stream/{TEST_VIDEO_ID}"
        )))
        .respond_with(json_response(
            r#"{"success":true,"errors":[],"messages":[],"result":{}}"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = client
        .stream_delete_video(&StreamParameters::default())
        .await
        .unwrap_err();
    assert_eq!(err.as_request(), Some(RequestError::MissingAccountId));

    let err = client
        .stream_delete_video(&StreamParameters {
            account_id: TEST_ACCOUNT_ID.to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_eq!(err.as_request(), Some(RequestError::MissingVideoId));

    client
        .stream_delete_video(&StreamParameters {
            account_id: TEST_ACCOUNT_ID.to_string(),
            video_id: TEST_VIDEO_ID.to_string(),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn embed_html_returns_body_verbatim() {
    let (mock_server, client) = setup().await;

    let stream_html = r#"<stream id="ea95132c15732412d22c1476fa83f27a"></stream><script data-cfasync="false" defer type="text/javascript" src="https://embed.cloudflarestream.com/embed/we4g.fla9.latest.js"></script>"#;
    Mock::given(method("GET"))
        .and(path(format!(
            "/accounts/{TEST_ACCOUNT_ID}/stream/{TEST_VIDEO_ID}/embed"
        )))
        .respond_with(ResponseTemplate::new(200).set_body_raw(stream_html, "text/html"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = client
        .stream_embed_html(&StreamParameters::default())
        .await
        .unwrap_err();
    assert_eq!(err.as_request(), Some(RequestError::MissingAccountId));

    let err = client
        .stream_embed_html(&StreamParameters {
            account_id: TEST_ACCOUNT_ID.to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_eq!(err.as_request(), Some(RequestError::MissingVideoId));

    let html = client
        .stream_embed_html(&StreamParameters {
            account_id: TEST_ACCOUNT_ID.to_string(),
            video_id: TEST_VIDEO_ID.to_string(),
        })
        .await
        .unwrap();
    assert_eq!(html, stream_html, "bad html output");
}

#[tokio::test]
async fn associate_nft() {
    let (mock_server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(format!(
            "/accounts/{TEST_ACCOUNT_ID}/stream/{TEST_VIDEO_ID}"
        )))
        .and(body_json(serde_json::json!({
            "contract": "0x57f1887a8bf19b14fc0d912b9b2acc9af147ea85",
            "token": 5
        })))
        .respond_with(json_response(SINGLE_STREAM_RESPONSE))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = client
        .stream_associate_nft(&StreamVideoNftParameters::default())
        .await
        .unwrap_err();
    assert_eq!(err.as_request(), Some(RequestError::MissingAccountId));

    let err = client
        .stream_associate_nft(&StreamVideoNftParameters {
            account_id: TEST_ACCOUNT_ID.to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_eq!(err.as_request(), Some(RequestError::MissingVideoId));

    let video = client
        .stream_associate_nft(&StreamVideoNftParameters {
            account_id: TEST_ACCOUNT_ID.to_string(),
            video_id: TEST_VIDEO_ID.to_string(),
            contract: "0x57f1887a8bf19b14fc0d912b9b2acc9af147ea85".to_string(),
            token: 5,
        })
        .await
        .unwrap();
    assert_eq!(video, test_video());
}

#[tokio::test]
async fn create_signed_url() {
    let (mock_server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(format!(
            "/accounts/{TEST_ACCOUNT_ID}/stream/{TEST_VIDEO_ID}/token"
        )))
        .respond_with(json_response(
            r#"{"success":true,"errors":[],"messages":[],"result":{"token":"eyJhbGciOiJSUzI1NiIsImtpZCI6ImU5ZGI5OTBhODI2NjZkZDU3MWM3N2Y5NDRhNWM1YzhkIn0"}}"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = client
        .stream_create_signed_url(&StreamSignedUrlParameters::default())
        .await
        .unwrap_err();
    assert_eq!(err.as_request(), Some(RequestError::MissingAccountId));

    let err = client
        .stream_create_signed_url(&StreamSignedUrlParameters {
            account_id: TEST_ACCOUNT_ID.to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_eq!(err.as_request(), Some(RequestError::MissingVideoId));

    let token = client
        .stream_create_signed_url(&StreamSignedUrlParameters {
            account_id: TEST_ACCOUNT_ID.to_string(),
            video_id: TEST_VIDEO_ID.to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(
        token,
        "eyJhbGciOiJSUzI1NiIsImtpZCI6ImU5ZGI5OTBhODI2NjZkZDU3MWM3N2Y5NDRhNWM1YzhkIn0"
    );
}

#[tokio::test]
async fn malformed_json_on_success_status_is_parse_error() {
    let (mock_server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(format!(
            "/accounts/{TEST_ACCOUNT_ID}/stream/{TEST_VIDEO_ID}"
        )))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html>oops</html>", "text/html"))
        .mount(&mock_server)
        .await;

    let err = client
        .stream_get_video(&StreamParameters {
            account_id: TEST_ACCOUNT_ID.to_string(),
            video_id: TEST_VIDEO_ID.to_string(),
        })
        .await
        .unwrap_err();

    assert!(err.is_parse(), "got {err:?}");
    assert!(err.to_string().contains("unable to unmarshal response"));
}

#[tokio::test]
async fn unsuccessful_envelope_surfaces_api_error() {
    let (mock_server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(format!(
            "/accounts/{TEST_ACCOUNT_ID}/stream/{TEST_VIDEO_ID}"
        )))
        .respond_with(json_response(
            r#"{"success":false,"errors":[{"code":10005,"message":"video not found"}],"messages":[],"result":null}"#,
        ))
        .mount(&mock_server)
        .await;

    let err = client
        .stream_get_video(&StreamParameters {
            account_id: TEST_ACCOUNT_ID.to_string(),
            video_id: TEST_VIDEO_ID.to_string(),
        })
        .await
        .unwrap_err();

    match err {
        Error::Api(details) => assert_eq!(details.first_code(), Some(10005)),
        other => panic!("expected Api error, got {other:?}"),
    }
}
