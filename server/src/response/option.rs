use crate::controller::Exhaust;
use application::transfer::OptionDto;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct OptionResponse {
    id: String,
    name: String,
}

pub struct OptionPresenter;

impl Exhaust<Vec<OptionDto>> for OptionPresenter {
    type To = axum::Json<Vec<OptionResponse>>;
    fn emit(&self, input: Vec<OptionDto>) -> Self::To {
        let result = input
            .into_iter()
            .map(|option| OptionResponse {
                id: option.id,
                name: option.name,
            })
            .collect::<Vec<_>>();

        axum::Json::from(result)
    }
}
