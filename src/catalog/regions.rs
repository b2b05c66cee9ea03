/// AWS regions a Data Center environment can be deployed to
pub const REGIONS: &[&str] = &[
    "us-east-1",
    "us-east-2",
    "us-west-1",
    "us-west-2",
    "ap-south-1",
    "ca-central-1",
    "ap-northeast-1",
    "ap-southeast-2",
    "ap-southeast-1",
    "ap-northeast-2",
    "eu-central-1",
    "sa-east-1",
    "eu-west-1",
    "eu-west-2",
    "eu-west-3",
    "eu-north-1",
];

/// Location names shown next to region codes. Display only.
const REGION_NAMES: &[(&str, &str)] = &[
    // US
    ("us-east-1", "N. Virginia"),
    ("us-east-2", "Ohio"),
    ("us-west-1", "N. California"),
    ("us-west-2", "Oregon"),
    // Asia Pacific
    ("ap-south-1", "Mumbai"),
    ("ap-northeast-1", "Tokyo"),
    ("ap-northeast-2", "Seoul"),
    ("ap-southeast-1", "Singapore"),
    ("ap-southeast-2", "Sydney"),
    // Canada
    ("ca-central-1", "Canada (Central)"),
    // Europe
    ("eu-central-1", "Frankfurt"),
    ("eu-west-1", "Ireland"),
    ("eu-west-2", "London"),
    ("eu-west-3", "Paris"),
    ("eu-north-1", "Stockholm"),
    // South America
    ("sa-east-1", "São Paulo"),
];

/// Find the location name for a region code
pub fn region_name(code: &str) -> Option<&'static str> {
    REGION_NAMES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}
