mod mock_injector_test;
