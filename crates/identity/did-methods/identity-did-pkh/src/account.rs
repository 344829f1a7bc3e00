//! CAIP-10 account identifiers
//! [https://github.com/ChainAgnostic/CAIPs/blob/main/CAIPs/caip-10.md]

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// A CAIP-10 account id, `<namespace>:<reference>:<address>` or `<namespace>:<address>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountId {
    pub namespace: String,
    /// Chain reference (e.g. `1` for Ethereum mainnet), absent in the 2-part form
    pub reference: Option<String>,
    pub address: String,
}

impl AccountId {
    /// Splits an account id into its parts.
    ///
    /// Only the namespace and the part after it must be non-empty; addresses
    /// aren't checked against the chain's own format.
    pub fn parse(account_id: &str) -> Result<Self, Error> {
        let Some((namespace, rest)) = account_id.split_once(':') else {
            return Err(Error::InvalidAccountId(account_id.to_string()));
        };
        if namespace.is_empty() || rest.is_empty() {
            return Err(Error::InvalidAccountId(account_id.to_string()));
        }

        let (reference, address) = match rest.split_once(':') {
            Some((reference, address)) if !reference.is_empty() && !address.is_empty() => {
                (Some(reference.to_string()), address.to_string())
            }
            _ => (None, rest.to_string()),
        };

        Ok(AccountId {
            namespace: namespace.to_string(),
            reference,
            address,
        })
    }

    /// CAIP-2 chain id (`<namespace>:<reference>`) when a reference is present
    pub fn chain_id(&self) -> Option<String> {
        self.reference
            .as_ref()
            .map(|reference| [&self.namespace, ":", reference].concat())
    }
}

impl FromStr for AccountId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccountId::parse(s)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reference {
            Some(reference) => write!(f, "{}:{}:{}", self.namespace, reference, self.address),
            None => write!(f, "{}:{}", self.namespace, self.address),
        }
    }
}
