use serde::Serialize;
use tracing::info;

use common::Envelope;
use models::{BrandDto, CategoryLink};

use crate::client::ItemApi;

/// Message contributed by a step whose call never produced an envelope.
pub const TRANSPORT_FAILURE: &str = "item api request failed";

/// Outcome of one workflow step. A step skipped because its precondition did
/// not hold (empty edit list) counts as succeeded for aggregation.
#[derive(Clone, Debug, PartialEq)]
pub enum StepOutcome {
    Completed,
    Skipped,
    Failed(Vec<String>),
}

impl StepOutcome {
    fn from_response<T>(resp: Option<Envelope<T>>) -> Self {
        match resp {
            None => StepOutcome::Failed(vec![TRANSPORT_FAILURE.to_string()]),
            Some(env) if env.is_success => StepOutcome::Completed,
            Some(env) => {
                let messages = if env.error_messages.is_empty() {
                    vec!["operation failed".to_string()]
                } else {
                    env.error_messages
                };
                StepOutcome::Failed(messages)
            }
        }
    }
}

/// Terminal state of a create/edit flow: proceed to the detail view, or
/// redisplay the submitted input with every collected error message.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum FlowOutcome {
    Details { id: i64 },
    Redisplay { dto: BrandDto, errors: Vec<String> },
}

/// Orchestration of brand create/edit actions over the item API.
///
/// The edit flow issues up to three independent calls; there is no shared
/// transaction, so succeeded steps stay committed when a later step fails
/// and failures are reported rather than undone.
pub struct BrandFlows<A> {
    api: A,
}

impl<A: ItemApi> BrandFlows<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Expand the add-list into nested link rows, then issue one create.
    pub async fn create(&self, mut dto: BrandDto, token: &str) -> FlowOutcome {
        if !dto.category_id_add.is_empty() {
            dto.category_links = dto
                .category_id_add
                .iter()
                .map(|&category_id| CategoryLink { brand_id: 0, category_id })
                .collect();
        }

        match self.api.create_brand(&dto, token).await {
            Some(env) if env.is_success => match env.result {
                Some(created) => {
                    info!(id = created.id, "brand created");
                    FlowOutcome::Details { id: created.id }
                }
                None => FlowOutcome::Redisplay {
                    dto,
                    errors: vec!["create returned no record".to_string()],
                },
            },
            Some(env) => {
                let errors = if env.error_messages.is_empty() {
                    vec!["operation failed".to_string()]
                } else {
                    env.error_messages
                };
                FlowOutcome::Redisplay { dto, errors }
            }
            None => FlowOutcome::Redisplay {
                dto,
                errors: vec![TRANSPORT_FAILURE.to_string()],
            },
        }
    }

    /// Three sequential steps forming one logical update:
    /// 1. always update the base fields;
    /// 2. attach categories when the add-list is non-empty;
    /// 3. detach categories when the remove-list is non-empty.
    ///
    /// Every step runs regardless of the others' outcomes; messages are
    /// aggregated in step order so failure reporting is deterministic.
    pub async fn edit(&self, dto: BrandDto, token: &str) -> FlowOutcome {
        let base = StepOutcome::from_response(self.api.update_brand(&dto, token).await);

        let add = if dto.category_id_add.is_empty() {
            StepOutcome::Skipped
        } else {
            StepOutcome::from_response(
                self.api.add_categories(dto.id, &dto.category_id_add, token).await,
            )
        };

        let remove = if dto.category_id_remove.is_empty() {
            StepOutcome::Skipped
        } else {
            StepOutcome::from_response(
                self.api.remove_categories(dto.id, &dto.category_id_remove, token).await,
            )
        };

        let mut errors = Vec::new();
        for step in [base, add, remove] {
            if let StepOutcome::Failed(messages) = step {
                errors.extend(messages);
            }
        }

        if errors.is_empty() {
            info!(id = dto.id, "brand edit applied");
            FlowOutcome::Details { id: dto.id }
        } else {
            FlowOutcome::Redisplay { dto, errors }
        }
    }
}
