//! Paul Tol's color schemes.
//!
//! Source: <https://personal.sron.nl/~pault/#sec:qualitative>

use crate::types::Palette;

/// Qualitative, the default scheme.
pub const BRIGHT: Palette = Palette::new(
    "bright",
    &["#4477AA", "#EE6677", "#228833", "#CCBB44", "#66CCEE", "#AA3377", "#BBBBBB"],
);

/// Qualitative, readable in monochrome print.
pub const HIGH_CONTRAST: Palette = Palette::new("highcontrast", &["#004488", "#DDAA33", "#BB5566"]);

pub const VIBRANT: Palette = Palette::new(
    "vibrant",
    &["#EE7733", "#0077BB", "#33BBEE", "#EE3377", "#CC3311", "#009988", "#BBBBBB"],
);

/// Qualitative, nine colors plus a pale grey for bad data.
pub const MUTED: Palette = Palette::new(
    "muted",
    &[
        "#332288", "#88CCEE", "#44AA99", "#117733", "#999933", "#DDCC77", "#CC6677", "#882255",
        "#AA4499", "#DDDDDD",
    ],
);

pub const MEDIUM_CONTRAST: Palette = Palette::new(
    "mediumcontrast",
    &["#EECC66", "#EE99AA", "#6699CC", "#997700", "#994455", "#004488"],
);

pub const PALE: Palette = Palette::new(
    "pale",
    &["#BBCCEE", "#CCEEFF", "#CCDDAA", "#EEEEBB", "#FFCCCC", "#DDDDDD"],
);

pub const DARK: Palette = Palette::new(
    "dark",
    &["#222255", "#225555", "#225522", "#666633", "#663333", "#555555"],
);

/// Qualitative, light enough to carry black text labels.
pub const LIGHT: Palette = Palette::new(
    "light",
    &[
        "#77AADD", "#EE8866", "#EEDD88", "#FFAABB", "#99DDFF", "#44BB99", "#BBCC33", "#AAAA00",
        "#DDDDDD",
    ],
);

/// Discrete rainbow, all 29 steps.
pub const DISCRETE_RAINBOW: Palette = Palette::new(
    "discreterainbow",
    &[
        "#E8ECFB", "#D9CCE3", "#D1BBD7", "#CAACCB", "#BA8DB4", "#AE76A3", "#AA6F9E", "#994F88",
        "#882E72", "#1965B0", "#437DBF", "#5289C7", "#6195CF", "#7BAFDE", "#4EB265", "#90C987",
        "#CAE0AB", "#F7F056", "#F7CB45", "#F6C141", "#F4A736", "#F1932D", "#EE8026", "#E8601C",
        "#E65518", "#DC050C", "#A5170E", "#72190E", "#42150A",
    ],
);

/// Diverging, blue to red.
pub const SUNSET: Palette = Palette::new(
    "sunset",
    &[
        "#364B9A", "#4A7BB7", "#6EA6CD", "#98CAE1", "#C2E4EF", "#EAECCC", "#FEDA8B", "#FDB366",
        "#F67E4B", "#DD3D2D", "#A50026",
    ],
);

/// Diverging, teal to red.
pub const NIGHTFALL: Palette = Palette::new(
    "nightfall",
    &[
        "#125A56", "#00767B", "#238F9D", "#42A7C6", "#60BCE9", "#9DCCEF", "#C6DBED", "#DEE6E7",
        "#ECEADA", "#F0E6B2", "#F9D576", "#FFB954", "#FD9A44", "#F57634", "#E94C1F", "#D11807",
        "#A01813",
    ],
);

/// Diverging, blue to red.
pub const BU_RD: Palette = Palette::new(
    "BuRd",
    &[
        "#2166AC", "#4393C3", "#92C5DE", "#D1E5F0", "#F7F7F7", "#FDDBC7", "#F4A582", "#D6604D",
        "#B2182B",
    ],
);

/// Diverging, purple to green.
pub const PR_GN: Palette = Palette::new(
    "PRGn",
    &[
        "#762A83", "#9970AB", "#C2A5CF", "#E7D4E8", "#F7F7F7", "#D9F0D3", "#ACD39E", "#5AAE61",
        "#1B7837",
    ],
);

/// Sequential, yellow to brown.
pub const YL_OR_BR: Palette = Palette::new(
    "YlOrBr",
    &[
        "#FFFFE5", "#FFF7BC", "#FEE391", "#FEC44F", "#FB9A29", "#EC7014", "#CC4C02", "#993404",
        "#662506",
    ],
);

/// Sequential, light yellow to dark purple.
pub const IRIDESCENT: Palette = Palette::new(
    "iridescent",
    &[
        "#FEFBE9", "#FCF7D5", "#F5F3C1", "#EAF0B5", "#DDECBF", "#D0E7CA", "#C2E3D2", "#B5DDD8",
        "#A8D8DC", "#9BD2E1", "#8DCBE4", "#81C4E7", "#7BBCE7", "#7EB2E4", "#88A5DD", "#9398D2",
        "#9B8AC4", "#9D7DB2", "#9A709E", "#906388", "#805770", "#684957", "#46353A",
    ],
);

/// Sequential, cyan to dark red.
pub const INCANDESCENT: Palette = Palette::new(
    "incandescent",
    &[
        "#CEFFFF", "#C6F7D6", "#A2F49B", "#BBE453", "#D5CE04", "#E7B503", "#F19903", "#F6790B",
        "#F94902", "#E40515", "#A80003",
    ],
);

/// Smooth rainbow, sampled at 34 points.
pub const SMOOTH_RAINBOW: Palette = Palette::new(
    "smoothrainbow",
    &[
        "#E8ECFB", "#DDD8EF", "#D1C1E1", "#C3A8D1", "#B58FC2", "#A778B4", "#9B62A7", "#8C4E99",
        "#6F4C9B", "#6059A9", "#5568B8", "#4E79C5", "#4D8AC6", "#4E96BC", "#549EB3", "#59A5A9",
        "#60AB9E", "#69B190", "#77B77D", "#8CBC68", "#A6BE54", "#BEBC48", "#D1B541", "#DDAA3C",
        "#E49C39", "#E78C35", "#E67932", "#E4632D", "#DF4828", "#DA2222", "#B8221E", "#95211B",
        "#721E17", "#521A13",
    ],
);

pub const PAUL_TOL: &[Palette] = &[
    BRIGHT,
    HIGH_CONTRAST,
    VIBRANT,
    MUTED,
    MEDIUM_CONTRAST,
    PALE,
    DARK,
    LIGHT,
    DISCRETE_RAINBOW,
    SUNSET,
    NIGHTFALL,
    BU_RD,
    PR_GN,
    YL_OR_BR,
    IRIDESCENT,
    INCANDESCENT,
    SMOOTH_RAINBOW,
];
