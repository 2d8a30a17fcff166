use std::sync::atomic::{AtomicUsize, Ordering};

use conveyor_gateway::{GatewayError, GatewayExecutionOutput, GatewayHandle, GatewayInvocation};
use futures::future::join_all;
use sonic_rs::{json, JsonValueTrait};

use super::subgraphs::{AccountsSubgraph, ProductsSubgraph, ReviewsSubgraph, SubgraphFault};

pub const SUPERGRAPH_SDL: &str = r#"
scalar Int

type Query {
  me: User
}

type User {
  id: ID!
  username: String
  reviews(limit: Int): [Review]
}

type Review {
  body: String
  product: Product
}

type Product {
  upc: String!
  name: String
}
"#;

/// A gateway that plans and executes in-process against the fixture
/// subgraphs. The plan is what a real planner would produce for the demo
/// graph: accounts then reviews in series, then one product fetch per review
/// in parallel.
pub struct LocalGateway {
    loaded: bool,
    accounts: AccountsSubgraph,
    reviews: ReviewsSubgraph,
    products: ProductsSubgraph,
    invocations: AtomicUsize,
}

impl LocalGateway {
    pub fn load() -> Self {
        Self {
            loaded: true,
            accounts: AccountsSubgraph::new(),
            reviews: ReviewsSubgraph::new(),
            products: ProductsSubgraph::new(),
            invocations: AtomicUsize::new(0),
        }
    }

    /// A gateway whose supergraph was never composed.
    pub fn unloaded() -> Self {
        Self {
            loaded: false,
            ..Self::load()
        }
    }

    /// Loaded, but the reviews subgraph is down. Executions still produce a
    /// response body; the outage shows up as an error entry next to nulled
    /// data.
    pub fn with_failing_reviews() -> Self {
        Self {
            reviews: ReviewsSubgraph::failing(),
            ..Self::load()
        }
    }

    pub fn invocation_count(&self) -> usize {
        self.invocations.load(Ordering::SeqCst)
    }

    fn respond(
        &self,
        body: sonic_rs::Value,
        error_count: usize,
    ) -> Result<GatewayExecutionOutput, GatewayError> {
        Ok(GatewayExecutionOutput {
            body: sonic_rs::to_vec(&body).expect("fixture body serializes"),
            error_count,
        })
    }

    fn soft_failure(&self, fault: SubgraphFault) -> Result<GatewayExecutionOutput, GatewayError> {
        let body = json!({
            "data": { "me": null },
            "errors": [{
                "message": format!(
                    "subgraph '{}' failed: {}",
                    fault.subgraph, fault.reason
                ),
                "path": ["me"],
            }],
        });
        self.respond(body, 1)
    }
}

#[async_trait::async_trait]
impl GatewayHandle for LocalGateway {
    fn is_loaded(&self) -> bool {
        self.loaded
    }

    async fn execute_plan(
        &self,
        invocation: GatewayInvocation<'_>,
    ) -> Result<GatewayExecutionOutput, GatewayError> {
        if !self.loaded {
            return Err(GatewayError::NotLoaded);
        }
        if let Some(token) = invocation.cancellation {
            if token.is_cancelled() {
                return Err(GatewayError::Cancelled);
            }
        }
        self.invocations.fetch_add(1, Ordering::SeqCst);

        // Serial part of the plan: the user entity, then its reviews.
        let user = match self.accounts.current_user().await {
            Ok(user) => user,
            Err(fault) => return self.soft_failure(fault),
        };
        let mut reviews = match self.reviews.reviews_for_user(user.id).await {
            Ok(reviews) => reviews,
            Err(fault) => return self.soft_failure(fault),
        };
        if let Some(limit) = invocation
            .variable_values
            .get("limit")
            .and_then(|value| value.as_u64())
        {
            reviews.truncate(limit as usize);
        }

        // Parallel part: one product fetch per review.
        let products = join_all(
            reviews
                .iter()
                .map(|review| self.products.product_by_upc(review.product_upc)),
        )
        .await;

        let mut review_values = Vec::with_capacity(reviews.len());
        for (review, product) in reviews.iter().zip(products) {
            let product = match product {
                Ok(product) => product,
                Err(fault) => return self.soft_failure(fault),
            };
            review_values.push(json!({
                "body": review.body,
                "product": { "name": product.name, "upc": product.upc },
            }));
        }

        let body = json!({
            "data": {
                "me": {
                    "username": user.username,
                    "reviews": review_values,
                },
            },
        });
        self.respond(body, 0)
    }
}

/// A loaded gateway whose every execution fails outright, as if no subgraph
/// were reachable at all.
pub struct UnreachableGateway;

#[async_trait::async_trait]
impl GatewayHandle for UnreachableGateway {
    fn is_loaded(&self) -> bool {
        true
    }

    async fn execute_plan(
        &self,
        _invocation: GatewayInvocation<'_>,
    ) -> Result<GatewayExecutionOutput, GatewayError> {
        Err(GatewayError::SubgraphUnreachable {
            subgraph: "accounts".into(),
            reason: "dns lookup failed".into(),
        })
    }
}

/// A gateway that hands back a body no GraphQL client could parse.
pub struct BrokenGateway;

#[async_trait::async_trait]
impl GatewayHandle for BrokenGateway {
    fn is_loaded(&self) -> bool {
        true
    }

    async fn execute_plan(
        &self,
        _invocation: GatewayInvocation<'_>,
    ) -> Result<GatewayExecutionOutput, GatewayError> {
        Ok(GatewayExecutionOutput {
            body: b"<html>502 bad gateway</html>".to_vec(),
            error_count: 0,
        })
    }
}
