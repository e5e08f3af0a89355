//! Payment operations against the gateway.
//!
//! Every operation goes through the same envelope: a `Transaction`
//! element carrying the action, its parameters and the merchant block
//! with a checksum over the parameters. Responses carry a `Response`
//! element whose `Status` leaf separates success from a structured error
//! payload.

use markup::{Declaration, Node, Object, Options, generate, parse};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::checksum::sign;
use crate::error::{Error, Result};
use crate::transport::Transport;

const ACTION_GET_BANKS: &str = "IDEAL.GETBANKS";
const ACTION_EXECUTE: &str = "IDEAL.EXECUTE";
const ACTION_TRANSACTION_STATUS: &str = "TRANSACTION.STATUS";

/// Protocol version sent in every action block.
const ACTION_VERSION: i32 = 1;

/// Merchant credentials issued by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Merchant {
    /// Merchant ID.
    pub id: String,
    /// Merchant key.
    pub key: String,
    /// Merchant secret; only ever used to compute checksums, never sent.
    pub secret: String,
}

/// A payment to execute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Amount to deduct from the bank account.
    pub amount: f64,
    /// Currency code, e.g. `EUR`.
    pub currency: String,
    /// Description or order number.
    pub description: String,
    /// URL the customer returns to after paying or cancelling.
    pub return_url: String,
    /// ID of the customer's bank, as listed by [`Client::banks`].
    pub bank: String,
}

/// One bank the gateway can redirect customers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bank {
    /// Bank ID, used as the `bank` field of a [`Payment`].
    pub id: String,
    /// Display name.
    pub name: String,
}

/// Result of executing a payment: where to send the customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redirect {
    /// Bank URL to redirect the customer to.
    pub url: String,
    /// Gateway transaction ID.
    pub transaction_id: String,
    /// Gateway transaction code.
    pub transaction_code: String,
}

/// Status of a previously executed transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionStatus {
    /// Gateway transaction ID.
    pub id: String,
    /// Status as reported by the gateway, e.g. `Paid`.
    pub status: String,
    /// Salt for verifying a matching callback checksum.
    pub salt: String,
}

/// Easy iDEAL bank and transaction management.
#[derive(Debug, Clone)]
pub struct Client {
    merchant: Merchant,
    transport: Transport,
}

impl Client {
    /// Creates a client talking to the production gateway.
    pub fn new(merchant: Merchant) -> Result<Self> {
        Ok(Self { merchant, transport: Transport::gateway()? })
    }

    /// Creates a client with an explicit transport.
    #[must_use]
    pub fn with_transport(merchant: Merchant, transport: Transport) -> Self {
        Self { merchant, transport }
    }

    /// Lists the banks customers can pay from.
    pub async fn banks(&self) -> Result<Vec<Bank>> {
        let response = self.call(ACTION_GET_BANKS, Object::new()).await?;
        banks_from(&response)
    }

    /// Executes a payment and returns the bank redirect.
    pub async fn execute(&self, payment: &Payment) -> Result<Redirect> {
        let parameters = Object::from_iter([
            ("Amount", Node::from(payment.amount)),
            ("Currency", Node::from(payment.currency.as_str())),
            ("Description", Node::from(payment.description.as_str())),
            ("Return", Node::from(payment.return_url.as_str())),
            ("Bank", Node::from(payment.bank.as_str())),
        ]);
        let response = self.call(ACTION_EXECUTE, parameters).await?;
        redirect_from(&response)
    }

    /// Checks the status of a previously executed transaction.
    pub async fn transaction_status(&self, transaction_id: &str) -> Result<TransactionStatus> {
        let parameters =
            Object::from_iter([("TransactionID", Node::from(transaction_id))]);
        let response = self.call(ACTION_TRANSACTION_STATUS, parameters).await?;
        status_from(&response)
    }

    /// One gateway round trip: sign, generate, post, parse, check status.
    async fn call(&self, action: &str, parameters: Object) -> Result<Node> {
        let request = build_envelope(action, parameters, &self.merchant)?;
        let options = Options::new().with_declaration(Declaration::default());
        let markup = generate(&request, &options)?;

        info!(action, "calling gateway");
        let body = self.transport.post(&markup).await?;

        let response = parse(&body)?;
        check_status(&response)?;
        debug!(action, "gateway reported OK");
        Ok(response)
    }
}

/// Builds the request envelope for one action.
///
/// The checksum covers the parameters only; an action without parameters
/// omits the `Parameters` element rather than sending an empty one.
fn build_envelope(action: &str, parameters: Object, merchant: &Merchant) -> Result<Node> {
    let checksum = sign(&Node::Object(parameters.clone()), &merchant.secret)?;

    let mut transaction = Object::new();
    transaction.insert(
        "Action",
        Node::Object(Object::from_iter([
            ("Name", Node::from(action)),
            ("Version", Node::from(ACTION_VERSION)),
        ])),
    );
    if !parameters.is_empty() {
        transaction.insert("Parameters", Node::Object(parameters));
    }
    transaction.insert(
        "Merchant",
        Node::Object(Object::from_iter([
            ("ID", Node::from(merchant.id.as_str())),
            ("Key", Node::from(merchant.key.as_str())),
            ("Checksum", Node::from(checksum)),
        ])),
    );

    let mut root = Object::new();
    root.insert("Transaction", Node::Object(transaction));
    Ok(Node::Object(root))
}

/// Checks the top-level status leaf, turning a structured error payload
/// into [`Error::Gateway`].
fn check_status(response: &Node) -> Result<()> {
    let status = leaf_at(response, &["Response", "Status"])?;
    if status == "OK" {
        return Ok(());
    }

    Err(Error::Gateway {
        code: leaf_at(response, &["Response", "Error", "ID"])?.to_string(),
        description: leaf_at(response, &["Response", "Error", "Description"])?.to_string(),
    })
}

fn banks_from(response: &Node) -> Result<Vec<Bank>> {
    let entries = response.get_path(&["Response", "Banks", "Bank"])?;

    // A single bank arrives as a bare object; the sibling merge only
    // produces a list from the second entry on.
    let entries: Vec<&Node> = match entries {
        Node::List(items) => items.iter().collect(),
        single @ Node::Object(_) => vec![single],
        Node::Leaf(_) => {
            return Err(Error::Shape { path: "Response/Banks/Bank".to_string() });
        }
    };

    entries
        .into_iter()
        .map(|entry| {
            Ok(Bank {
                id: leaf_at(entry, &["Id"])?.to_string(),
                name: leaf_at(entry, &["Name"])?.to_string(),
            })
        })
        .collect()
}

fn redirect_from(response: &Node) -> Result<Redirect> {
    let transaction = response.get_path(&["Response", "Transaction"])?;
    let url = leaf_at(transaction, &["BankURL"])?;

    Ok(Redirect {
        // The codec leaves text verbatim; the gateway entity-encodes
        // ampersands in URLs, so undo that one substitution here.
        url: url.replace("&amp;", "&"),
        transaction_id: leaf_at(transaction, &["ID"])?.to_string(),
        transaction_code: leaf_at(transaction, &["Code"])?.to_string(),
    })
}

fn status_from(response: &Node) -> Result<TransactionStatus> {
    let transaction = response.get_path(&["Response", "Transaction"])?;

    Ok(TransactionStatus {
        id: leaf_at(transaction, &["ID"])?.to_string(),
        status: leaf_at(transaction, &["Status"])?.to_string(),
        salt: leaf_at(transaction, &["Salt"])?.to_string(),
    })
}

/// Resolves a path and requires a leaf at its end.
fn leaf_at<'a>(node: &'a Node, path: &[&str]) -> Result<&'a str> {
    node.get_path(path)?
        .as_leaf()
        .ok_or_else(|| Error::Shape { path: path.join("/") })
}
