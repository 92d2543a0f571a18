mod document_validator_tests;
