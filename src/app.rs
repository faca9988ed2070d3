//! Root application module.
//!
//! Contains the main App component and application-level setup logic
//! following Leptos conventions.

use leptos::prelude::*;

use crate::components::UploadPage;
use crate::config::UPLOAD_ENDPOINT;
use crate::core::validate_endpoint;

/// Root application component with error boundary.
///
/// The page is only mounted when the configured endpoint is a valid URL;
/// otherwise the boundary fallback shows the configuration error. The upload
/// page keeps its own state; nothing is shared through context.
#[component]
pub fn App() -> impl IntoView {
    let page = validate_endpoint(UPLOAD_ENDPOINT).map(|()| view! { <UploadPage /> });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    font-family: system-ui, sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #db2777; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #6b7280; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <ul style="text-align: left; color: #db2777; font-size: 0.9rem;">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #6366f1;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                cursor: pointer;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            {page}
        </ErrorBoundary>
    }
}
