//! Wire types shared by the viewer gateway and the broadcast path.
//!
//! The viewer protocol is message-oriented and ordered per connection:
//! one `INIT` on connect carrying the full snapshot, then an `UPDATE` per
//! highlight change carrying only the selection. Inbound viewer messages
//! have no semantics.

use repograph_graph::{FileNode, GraphSnapshot, ImportEdge};
use serde::{Deserialize, Serialize};

/// Server -> viewer message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ViewerMessage {
    #[serde(rename = "INIT")]
    Init {
        nodes: Vec<FileNode>,
        edges: Vec<ImportEdge>,
        highlighted: Vec<String>,
    },

    #[serde(rename = "UPDATE")]
    Update { highlighted: Vec<String> },
}

impl ViewerMessage {
    pub fn init(snapshot: GraphSnapshot) -> Self {
        ViewerMessage::Init {
            nodes: snapshot.nodes,
            edges: snapshot.edges,
            highlighted: snapshot.highlighted,
        }
    }

    pub fn update(highlighted: Vec<String>) -> Self {
        ViewerMessage::Update { highlighted }
    }
}

/// Record handed from the command context to the connection context when the
/// highlight selection changes. Carries only the new selection; nodes and
/// edges never change after the initial scan.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightUpdate {
    pub highlighted: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::ViewerMessage;
    use pretty_assertions::assert_eq;
    use repograph_graph::FileNode;
    use serde_json::json;

    #[test]
    fn init_wire_shape() {
        let message = ViewerMessage::Init {
            nodes: vec![FileNode::new("src/AuthService.py", "AuthService.py")],
            edges: vec![],
            highlighted: vec!["src/AuthService.py".to_string()],
        };

        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({
                "type": "INIT",
                "nodes": [
                    {"id": "src/AuthService.py", "label": "AuthService.py", "type": "service"}
                ],
                "edges": [],
                "highlighted": ["src/AuthService.py"],
            })
        );
    }

    #[test]
    fn update_wire_shape() {
        let message = ViewerMessage::update(vec!["src/Utils.py".to_string()]);
        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({"type": "UPDATE", "highlighted": ["src/Utils.py"]})
        );
    }

    #[test]
    fn round_trips_through_json() {
        let message = ViewerMessage::update(vec!["a.py".to_string()]);
        let text = serde_json::to_string(&message).unwrap();
        let parsed: ViewerMessage = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, message);
    }
}
