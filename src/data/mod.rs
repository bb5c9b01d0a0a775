/// Data layer: core types, loading, querying and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<MissionRecord>, filter choices
///   └──────────┘
///        │
///        ├──────────────────────┐
///        ▼                      ▼
///   ┌──────────┐          ┌──────────┐
///   │  query    │          │  filter   │  predicates → indices
///   └──────────┘          └──────────┘
///                               │
///                         ┌─────┴─────┐
///                         ▼           ▼
///                    ┌────────┐  ┌────────┐
///                    │ stats   │  │ table   │  search + sort
///                    └────────┘  └────────┘
/// ```

pub mod filter;
pub mod input;
pub mod loader;
pub mod model;
pub mod query;
pub mod stats;
pub mod table;
