mod distribution;
mod entropy_quality;
