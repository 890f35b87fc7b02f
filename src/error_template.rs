use cfg_if::cfg_if;
use http::status::StatusCode;
use leptos::*;
use thiserror::Error;

#[cfg(feature = "ssr")]
use leptos_axum::ResponseOptions;

#[derive(Clone, Debug, Error)]
pub enum AppError {
    #[error("Страница не найдена")]
    NotFound,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Renders routing errors. Pass either `outside_errors` or `errors`.
#[component]
pub fn ErrorTemplate(
    #[prop(optional)] outside_errors: Option<Errors>,
    #[prop(optional)] errors: Option<RwSignal<Errors>>,
) -> impl IntoView {
    let errors = match (outside_errors, errors) {
        (Some(errors), _) => errors,
        (None, Some(errors)) => errors.get_untracked(),
        (None, None) => Errors::default(),
    };

    let errors: Vec<AppError> = errors
        .into_iter()
        .filter_map(|(_, err)| err.downcast_ref::<AppError>().cloned())
        .collect();
    log::warn!("rendering errors: {:?}", errors);

    cfg_if! {
        if #[cfg(feature = "ssr")] {
            if let (Some(response), Some(first)) = (use_context::<ResponseOptions>(), errors.first()) {
                response.set_status(first.status_code());
            }
        }
    }

    let heading = if errors.len() > 1 { "Ошибки" } else { "Ошибка" };

    view! {
        <div class="error-page">
            <h1>{heading}</h1>
            {errors
                .into_iter()
                .map(|err| view! {
                    <h2>{err.status_code().as_u16()}</h2>
                    <p>{err.to_string()}</p>
                })
                .collect_view()}
            <a href="/">"Вернуться к правилам"</a>
        </div>
    }
}
