//! In-process stand-ins for the services behind a federated graph. Each one
//! owns a slice of the schema and a tiny fixed dataset, like the canonical
//! accounts/reviews/products demo graph.

pub struct SubgraphFault {
    pub subgraph: &'static str,
    pub reason: String,
}

pub struct UserRecord {
    pub id: &'static str,
    pub username: &'static str,
}

pub struct ReviewRecord {
    pub body: &'static str,
    pub product_upc: &'static str,
}

pub struct ProductRecord {
    pub upc: &'static str,
    pub name: &'static str,
}

pub struct AccountsSubgraph {
    healthy: bool,
}

impl AccountsSubgraph {
    pub fn new() -> Self {
        Self { healthy: true }
    }

    pub async fn current_user(&self) -> Result<UserRecord, SubgraphFault> {
        if !self.healthy {
            return Err(SubgraphFault {
                subgraph: "accounts",
                reason: "connection refused".into(),
            });
        }
        Ok(UserRecord {
            id: "1",
            username: "@ada",
        })
    }
}

pub struct ReviewsSubgraph {
    healthy: bool,
}

impl ReviewsSubgraph {
    pub fn new() -> Self {
        Self { healthy: true }
    }

    pub fn failing() -> Self {
        Self { healthy: false }
    }

    pub async fn reviews_for_user(&self, user_id: &str) -> Result<Vec<ReviewRecord>, SubgraphFault> {
        if !self.healthy {
            return Err(SubgraphFault {
                subgraph: "reviews",
                reason: "connection refused".into(),
            });
        }
        if user_id != "1" {
            return Ok(vec![]);
        }
        Ok(vec![
            ReviewRecord {
                body: "Love it!",
                product_upc: "1",
            },
            ReviewRecord {
                body: "Too expensive.",
                product_upc: "2",
            },
        ])
    }
}

pub struct ProductsSubgraph {
    healthy: bool,
}

impl ProductsSubgraph {
    pub fn new() -> Self {
        Self { healthy: true }
    }

    pub async fn product_by_upc(&self, upc: &str) -> Result<ProductRecord, SubgraphFault> {
        if !self.healthy {
            return Err(SubgraphFault {
                subgraph: "products",
                reason: "connection refused".into(),
            });
        }
        match upc {
            "1" => Ok(ProductRecord {
                upc: "1",
                name: "Table",
            }),
            "2" => Ok(ProductRecord {
                upc: "2",
                name: "Couch",
            }),
            other => Err(SubgraphFault {
                subgraph: "products",
                reason: format!("unknown upc '{}'", other),
            }),
        }
    }
}
