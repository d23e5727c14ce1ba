mod journey;
mod quiz;
mod sections;
