use crate::core::form::{FormPayload, SubmissionService, SubmitError};
use crate::dom;
use async_trait::async_trait;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Stand-in round trip: resolves successfully after a fixed delay.
pub struct SimulatedSubmission {
    pub delay_ms: u32,
}

#[async_trait(?Send)]
impl SubmissionService for SimulatedSubmission {
    async fn submit(&self, payload: FormPayload) -> Result<(), SubmitError> {
        log::debug!("[form] simulating submission of {} fields", payload.len());
        dom::sleep_ms(self.delay_ms).await;
        Ok(())
    }
}

/// POSTs the form as `application/x-www-form-urlencoded` to an HTTP endpoint.
pub struct FetchSubmission {
    pub endpoint: String,
}

#[async_trait(?Send)]
impl SubmissionService for FetchSubmission {
    async fn submit(&self, payload: FormPayload) -> Result<(), SubmitError> {
        post_form(&self.endpoint, &payload).await
    }
}

async fn post_form(endpoint: &str, payload: &FormPayload) -> Result<(), SubmitError> {
    let window = web::window().ok_or(SubmitError::Unavailable)?;
    let params = web::UrlSearchParams::new().map_err(js_network)?;
    for (name, value) in payload {
        params.append(name, value);
    }

    let headers = web::Headers::new().map_err(js_network)?;
    headers
        .set("Content-Type", "application/x-www-form-urlencoded")
        .map_err(js_network)?;
    headers.set("Accept", "application/json").map_err(js_network)?;

    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    let body: String = params.to_string().into();
    init.set_body(&body.into());

    let request = web::Request::new_with_str_and_init(endpoint, &init).map_err(js_network)?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_network)?;
    let response: web::Response = response.dyn_into().map_err(js_network)?;
    if response.ok() {
        Ok(())
    } else {
        Err(SubmitError::Rejected {
            status: response.status(),
        })
    }
}

fn js_network(e: wasm_bindgen::JsValue) -> SubmitError {
    SubmitError::Network(format!("{:?}", e))
}

/// Collect string-valued entries of `form` in document order; file inputs are
/// skipped.
pub fn read_payload(form: &web::HtmlFormElement) -> FormPayload {
    let Ok(data) = web::FormData::new_with_form(form) else {
        return FormPayload::new();
    };
    let Ok(Some(iter)) = js_sys::try_iter(&data) else {
        return FormPayload::new();
    };
    iter.filter_map(Result::ok)
        .filter_map(|entry| {
            let pair: js_sys::Array = entry.dyn_into().ok()?;
            Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
        })
        .collect()
}
