mod enum_sampler_tests;
mod provider_tests;
