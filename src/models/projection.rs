//! Instance fields requested from `describe-instances`.

use itertools::Itertools;

/// One output column: table header and the JMESPath expression feeding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub header: &'static str,
    pub path: &'static str,
}

/// Columns shown for every instance, in display order.
pub const COLUMNS: [Column; 7] = [
    Column {
        header: "InstanceID",
        path: "InstanceId",
    },
    Column {
        header: "Name",
        path: "Tags[?Key=='Name'] | [0].Value",
    },
    Column {
        header: "Type",
        path: "InstanceType",
    },
    Column {
        header: "State",
        path: "State.Name",
    },
    Column {
        header: "PublicIP",
        path: "PublicIpAddress",
    },
    Column {
        header: "PrivateIP",
        path: "PrivateIpAddress",
    },
    Column {
        header: "LaunchTime",
        path: "LaunchTime",
    },
];

/// Build the `--query` argument for `aws ec2 describe-instances`.
///
/// Produces a multiselect hash keyed by the column headers, in column order.
///
/// # Examples
/// ```
/// let query = aws_ec2_list::models::instance_query();
/// assert!(query.starts_with("Reservations[*].Instances[*].{InstanceID:InstanceId,"));
/// ```
pub fn instance_query() -> String {
    let fields = COLUMNS
        .iter()
        .map(|c| format!("{}:{}", c.header, c.path))
        .join(",");
    format!("Reservations[*].Instances[*].{{{fields}}}")
}
