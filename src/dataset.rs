//! Loaders for the relational terrorism corpora.
//!
//! Two directory layouts are supported, both fixed by the published data:
//! the attack corpus (incident nodes linked by co-location) and the
//! relationship corpus (terrorist-pair nodes linked when pairs share a
//! member). Node tables are delimited rows carrying a URI, a 0/1 feature
//! block and a label column; edge files hold two URIs per line; label files
//! enumerate the label vocabulary. URIs name a node only through their
//! fragment, the part after the last `#`.
//!
//! Parsing is schema-driven: column ranges, delimiters and the fragment
//! separator live in [`TableSchema`] values instead of scattered literals.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::ops::Range;
use std::path::Path;

use crate::graph::AdjacencyMatrix;
use crate::{Error, Result};

/// Column layout of one node table.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableSchema {
    /// Field delimiter of a table row.
    pub delimiter: u8,
    /// Separator between a URI and the fragment naming the node.
    pub fragment_separator: char,
    /// Columns holding the numeric feature block.
    pub feature_columns: Range<usize>,
    /// Column holding the class label.
    pub label_column: usize,
}

impl TableSchema {
    /// Layout of the attack node table: URI, 106 features, label URI.
    pub fn attack() -> Self {
        Self { delimiter: b'\t', fragment_separator: '#', feature_columns: 1..107, label_column: 107 }
    }

    /// Layout of the four relationship tables: pair URI, 1224 features,
    /// relation label.
    pub fn relationship() -> Self {
        Self { delimiter: b'\t', fragment_separator: '#', feature_columns: 1..1225, label_column: 1225 }
    }
}

/// One parsed node table. Rows stay in file order; `ids[i]`, `features[i]`
/// and `labels[i]` describe the same node.
#[derive(Debug, Clone, Default)]
pub struct NodeTable {
    pub ids: Vec<String>,
    pub features: Vec<Vec<f64>>,
    pub labels: Vec<String>,
}

impl NodeTable {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Width of the feature block, 0 for an empty table.
    pub fn feature_dim(&self) -> usize {
        self.features.first().map_or(0, Vec::len)
    }
}

/// Trailing fragment of a URI, or the whole string when no separator occurs.
fn fragment(uri: &str, separator: char) -> &str {
    uri.rsplit_once(separator).map_or(uri, |(_, frag)| frag)
}

fn malformed(path: &Path, line: usize, msg: impl Into<String>) -> Error {
    Error::Malformed { path: path.display().to_string(), line, msg: msg.into() }
}

/// Read a label vocabulary, one label per line, URI fragments reduced to
/// their fragment.
pub fn parse_label_file(path: impl AsRef<Path>, fragment_separator: char) -> Result<Vec<String>> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let mut labels = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        labels.push(fragment(trimmed, fragment_separator).to_string());
    }
    Ok(labels)
}

/// Read one node table according to `schema`.
///
/// Every row must carry the full feature range and the label column; feature
/// fields must parse as numbers. Violations report the file, line and field.
pub fn parse_node_table(path: impl AsRef<Path>, schema: &TableSchema) -> Result<NodeTable> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(schema.delimiter)
        .flexible(true)
        .from_path(path)?;

    let mut table = NodeTable::default();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let line = row + 1;
        let uri = record
            .get(0)
            .ok_or_else(|| malformed(path, line, "missing node column"))?;

        let mut features = Vec::with_capacity(schema.feature_columns.len());
        for column in schema.feature_columns.clone() {
            let field = record
                .get(column)
                .ok_or_else(|| malformed(path, line, format!("missing feature column {column}")))?;
            let value: f64 = field.trim().parse().map_err(|_| {
                malformed(path, line, format!("bad feature value {field:?} in column {column}"))
            })?;
            features.push(value);
        }

        let label = record
            .get(schema.label_column)
            .ok_or_else(|| malformed(path, line, format!("missing label column {}", schema.label_column)))?;

        table.ids.push(fragment(uri, schema.fragment_separator).to_string());
        table.features.push(features);
        table.labels.push(fragment(label, schema.fragment_separator).to_string());
    }
    Ok(table)
}

/// Read an edge file: two whitespace-separated URIs per line, blank lines
/// skipped, endpoints reduced to their fragment.
pub fn parse_edge_file(
    path: impl AsRef<Path>,
    fragment_separator: char,
) -> Result<Vec<(String, String)>> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let mut edges = Vec::new();
    for (row, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let mut uris = trimmed.split_whitespace();
        let a = uris
            .next()
            .ok_or_else(|| malformed(path, row + 1, "missing source endpoint"))?;
        let b = uris
            .next()
            .ok_or_else(|| malformed(path, row + 1, "missing target endpoint"))?;
        edges.push((
            fragment(a, fragment_separator).to_string(),
            fragment(b, fragment_separator).to_string(),
        ));
    }
    Ok(edges)
}

/// Build a 0/1 adjacency matrix over `ids` (row order defines node indices)
/// from an id edge list. Unknown endpoints are an error, duplicate edges
/// collapse onto the same entry.
pub fn adjacency_from_edges(
    ids: &[String],
    edges: &[(String, String)],
    symmetric: bool,
) -> Result<AdjacencyMatrix> {
    let index: HashMap<&str, usize> =
        ids.iter().enumerate().map(|(i, id)| (id.as_str(), i)).collect();
    let mut matrix = AdjacencyMatrix::zeros(ids.len());
    for (source, target) in edges {
        let &u = index
            .get(source.as_str())
            .ok_or_else(|| Error::UnknownNode(source.clone()))?;
        let &v = index
            .get(target.as_str())
            .ok_or_else(|| Error::UnknownNode(target.clone()))?;
        matrix.set(u, v, 1.0);
        if symmetric {
            matrix.set(v, u, 1.0);
        }
    }
    Ok(matrix)
}

/// Keep `values[v]` only for nodes whose column total is nonzero.
///
/// This mirrors how derived per-node vectors (labels, scores) are aligned
/// with a matrix whose isolated nodes carry no signal. The incoming-edge
/// (column) view decides, matching the clustering convention.
pub fn prune_isolated<T: Clone>(values: &[T], graph: &AdjacencyMatrix) -> Result<Vec<T>> {
    let n = graph.node_count();
    if values.len() != n {
        return Err(Error::LengthMismatch { expected: n, got: values.len() });
    }
    Ok((0..n)
        .filter(|&v| graph.column_total(v) != 0.0)
        .map(|v| values[v].clone())
        .collect())
}

/// File names of the attack corpus.
const ATTACK_LABELS: &str = "terrorist_attack.labels";
const ATTACK_NODES: &str = "terrorist_attack.nodes";
const ATTACK_LOC_EDGES: &str = "terrorist_attack_loc.edges";
const ATTACK_LOC_ORG_EDGES: &str = "terrorist_attack_loc_org.edges";

/// File names of the relationship corpus.
const REL_LABELS: &str = "TerroristRel.labels";
const REL_EDGES: &str = "TerroristRel.edges";
const REL_COLLEAGUE_NODES: &str = "TerroristRel_Colleague.nodes";
const REL_CONGREGATE_NODES: &str = "TerroristRel_Congregate.nodes";
const REL_CONTACT_NODES: &str = "TerroristRel_Contact.nodes";
const REL_FAMILY_NODES: &str = "TerroristRel_Family.nodes";

/// The attack corpus: incident nodes plus two co-location edge sets.
#[derive(Debug, Clone)]
pub struct AttackData {
    pub label_names: Vec<String>,
    pub nodes: NodeTable,
    /// Incidents at the same location.
    pub colocation_edges: Vec<(String, String)>,
    /// Incidents at the same location by the same organization.
    pub colocation_org_edges: Vec<(String, String)>,
}

impl AttackData {
    /// Symmetric adjacency over the node table's row order, co-location
    /// edges.
    pub fn colocation_matrix(&self) -> Result<AdjacencyMatrix> {
        adjacency_from_edges(&self.nodes.ids, &self.colocation_edges, true)
    }

    /// Symmetric adjacency over the node table's row order, same-organization
    /// co-location edges.
    pub fn colocation_org_matrix(&self) -> Result<AdjacencyMatrix> {
        adjacency_from_edges(&self.nodes.ids, &self.colocation_org_edges, true)
    }
}

/// Load the attack corpus from its directory.
pub fn load_attack_dataset(dir: impl AsRef<Path>) -> Result<AttackData> {
    let dir = dir.as_ref();
    let schema = TableSchema::attack();
    Ok(AttackData {
        label_names: parse_label_file(dir.join(ATTACK_LABELS), schema.fragment_separator)?,
        nodes: parse_node_table(dir.join(ATTACK_NODES), &schema)?,
        colocation_edges: parse_edge_file(dir.join(ATTACK_LOC_EDGES), schema.fragment_separator)?,
        colocation_org_edges: parse_edge_file(
            dir.join(ATTACK_LOC_ORG_EDGES),
            schema.fragment_separator,
        )?,
    })
}

/// The four relationship kinds with their numeric codes.
///
/// The codes are the historical class encoding: negative for the kin-like
/// relations, positive for the professional ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum RelationKind {
    Family = -2,
    Congregate = -1,
    Colleague = 1,
    Contact = 2,
}

impl RelationKind {
    /// Order in which relations are scanned when labeling a pair. A pair
    /// carrying several relations keeps the code of the last match, so later
    /// entries override earlier ones.
    pub const SCAN_ORDER: [RelationKind; 4] = [
        RelationKind::Family,
        RelationKind::Congregate,
        RelationKind::Colleague,
        RelationKind::Contact,
    ];

    /// Label string used by the node tables.
    pub fn label(self) -> &'static str {
        match self {
            RelationKind::Family => "family",
            RelationKind::Congregate => "congregate",
            RelationKind::Colleague => "colleague",
            RelationKind::Contact => "contact",
        }
    }

    pub fn code(self) -> i8 {
        self as i8
    }
}

/// The relationship corpus: one node table per relation kind plus the shared
/// pair edge list.
#[derive(Debug, Clone)]
pub struct RelationshipData {
    pub label_names: Vec<String>,
    pub edges: Vec<(String, String)>,
    pub colleague: NodeTable,
    pub congregate: NodeTable,
    pub contact: NodeTable,
    pub family: NodeTable,
}

impl RelationshipData {
    fn table(&self, kind: RelationKind) -> &NodeTable {
        match kind {
            RelationKind::Family => &self.family,
            RelationKind::Congregate => &self.congregate,
            RelationKind::Colleague => &self.colleague,
            RelationKind::Contact => &self.contact,
        }
    }

    /// Symmetric adjacency over the colleague table's row order, which is
    /// the canonical node ordering of this corpus.
    pub fn matrix(&self) -> Result<AdjacencyMatrix> {
        adjacency_from_edges(&self.colleague.ids, &self.edges, true)
    }

    /// Numeric relation code per pair, in colleague row order.
    ///
    /// Each relation table is joined by pair id; rows matching their table's
    /// relation label take that kind's code, with later kinds in
    /// [`RelationKind::SCAN_ORDER`] overriding earlier ones. Pairs matching
    /// nothing keep 0.
    pub fn label_codes(&self) -> Vec<i8> {
        let mut codes = vec![0i8; self.colleague.len()];
        for kind in RelationKind::SCAN_ORDER {
            let table = self.table(kind);
            let by_id: HashMap<&str, &str> = table
                .ids
                .iter()
                .zip(&table.labels)
                .map(|(id, label)| (id.as_str(), label.as_str()))
                .collect();
            for (row, id) in self.colleague.ids.iter().enumerate() {
                if by_id.get(id.as_str()).copied() == Some(kind.label()) {
                    codes[row] = kind.code();
                }
            }
        }
        codes
    }
}

/// Load the relationship corpus from its directory.
pub fn load_relationship_dataset(dir: impl AsRef<Path>) -> Result<RelationshipData> {
    let dir = dir.as_ref();
    let schema = TableSchema::relationship();
    Ok(RelationshipData {
        label_names: parse_label_file(dir.join(REL_LABELS), schema.fragment_separator)?,
        edges: parse_edge_file(dir.join(REL_EDGES), schema.fragment_separator)?,
        colleague: parse_node_table(dir.join(REL_COLLEAGUE_NODES), &schema)?,
        congregate: parse_node_table(dir.join(REL_CONGREGATE_NODES), &schema)?,
        contact: parse_node_table(dir.join(REL_CONTACT_NODES), &schema)?,
        family: parse_node_table(dir.join(REL_FAMILY_NODES), &schema)?,
    })
}
