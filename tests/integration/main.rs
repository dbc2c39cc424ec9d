//! End-to-end tests: full command transcripts against a fresh world.
