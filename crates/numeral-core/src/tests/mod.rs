mod proptest_convert;
